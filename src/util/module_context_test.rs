use super::*;
use crate::net::types::PanelSummary;

// =============================================================
// resolve
// =============================================================

#[test]
fn clinic_path_resolves_to_clinica() {
    let ctx = resolve("/clinica/dashboard");
    assert_eq!(ctx.module, Some(Module::Clinica));
    assert_eq!(ctx.display_name, "Clínica Veterinária");
    assert_eq!(ctx.display_color, "text-green-600");
}

#[test]
fn each_module_prefix_resolves() {
    assert_eq!(resolve("/petshop/produtos/lista").module, Some(Module::Petshop));
    assert_eq!(resolve("/grooming").module, Some(Module::Grooming));
}

#[test]
fn unknown_path_has_no_module() {
    let ctx = resolve("/unknown");
    assert_eq!(ctx, ModuleContext::NONE);
    assert!(!ctx.is_in_module());
}

#[test]
fn module_name_must_lead_the_path() {
    assert_eq!(resolve("/select-module").module, None);
    assert_eq!(resolve("/reports/clinica").module, None);
    assert_eq!(resolve("").module, None);
}

#[test]
fn resolve_is_pure() {
    let first = resolve("/grooming/servicos/lista");
    let second = resolve("/grooming/servicos/lista");
    assert_eq!(first, second);
}

// =============================================================
// module_route
// =============================================================

#[test]
fn module_route_prefixes_inside_module() {
    let ctx = resolve("/clinica/dashboard");
    assert_eq!(module_route(&ctx, "pets/lista"), "/clinica/pets/lista");
    assert_eq!(module_route(&ctx, "/pets/lista"), "/clinica/pets/lista");
}

#[test]
fn module_route_passthrough_outside_module() {
    assert_eq!(module_route(&ModuleContext::NONE, "/perfil"), "/perfil");
}

// =============================================================
// Module
// =============================================================

#[test]
fn panel_type_round_trips() {
    for module in Module::ALL {
        assert_eq!(Module::from_panel_type(module.panel_type()), Some(module));
    }
    assert_eq!(Module::from_panel_type("clinic"), Some(Module::Clinica));
    assert_eq!(Module::from_panel_type("HOTEL"), None);
}

#[test]
fn dashboard_path_uses_slug() {
    assert_eq!(Module::Petshop.dashboard_path(), "/petshop/dashboard");
}

// =============================================================
// module_cards
// =============================================================

fn user_with_panels(panels: &[(&str, &str)], active: Option<&str>) -> User {
    User {
        id: "u-1".to_owned(),
        name: "Ana".to_owned(),
        email: "ana@clinic.test".to_owned(),
        role: None,
        company_id: None,
        clinic_id: None,
        panel_id: active.map(str::to_owned),
        panel_type: None,
        panels: panels
            .iter()
            .map(|(id, kind)| PanelSummary { id: (*id).to_owned(), panel_type: (*kind).to_owned() })
            .collect(),
    }
}

#[test]
fn module_cards_mark_available_and_active_panels() {
    let user = user_with_panels(&[("p-1", "PETSHOP"), ("p-2", "CLINIC")], Some("p-2"));
    let cards = module_cards(&user);

    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0].panel_id.as_deref(), Some("p-1"));
    assert!(!cards[0].is_active);
    assert!(cards[1].is_active);
    assert!(!cards[2].is_available());
}

#[test]
fn module_cards_without_selection_have_no_active_card() {
    let user = user_with_panels(&[("p-9", "GROOMING")], None);
    assert!(module_cards(&user).iter().all(|c| !c.is_active));
}
