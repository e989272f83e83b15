//! Business-module context derived from the current path.
//!
//! Cosmetic only: picks the sidebar palette and title for the guarded shell.
//! Never consult it for authorization.

#[cfg(test)]
#[path = "module_context_test.rs"]
mod module_context_test;

use crate::net::types::User;

/// The three business areas of the admin client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Module {
    Petshop,
    Clinica,
    Grooming,
}

impl Module {
    pub const ALL: [Module; 3] = [Module::Petshop, Module::Clinica, Module::Grooming];

    /// URL prefix segment (`/petshop/...`).
    pub fn slug(self) -> &'static str {
        match self {
            Self::Petshop => "petshop",
            Self::Clinica => "clinica",
            Self::Grooming => "grooming",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Petshop => "PetShop",
            Self::Clinica => "Clínica Veterinária",
            Self::Grooming => "Grooming",
        }
    }

    pub fn display_color(self) -> &'static str {
        match self {
            Self::Petshop => "text-blue-600",
            Self::Clinica => "text-green-600",
            Self::Grooming => "text-purple-600",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Petshop => "Products, sales and stock",
            Self::Clinica => "Appointments, records and exams",
            Self::Grooming => "Bath and grooming schedule",
        }
    }

    /// Backend panel type for this module.
    pub fn panel_type(self) -> &'static str {
        match self {
            Self::Petshop => "PETSHOP",
            Self::Clinica => "CLINIC",
            Self::Grooming => "GROOMING",
        }
    }

    pub fn from_panel_type(panel_type: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.panel_type().eq_ignore_ascii_case(panel_type))
    }

    pub fn dashboard_path(self) -> String {
        format!("/{}/dashboard", self.slug())
    }
}

/// Theming context for the active location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModuleContext {
    pub module: Option<Module>,
    pub display_color: &'static str,
    pub display_name: &'static str,
}

impl ModuleContext {
    pub const NONE: ModuleContext = ModuleContext { module: None, display_color: "text-gray-600", display_name: "" };

    pub fn is_in_module(&self) -> bool {
        self.module.is_some()
    }
}

/// Map a location path to its module context.
///
/// Matches on a plain prefix, so `/clinica`, `/clinica/` and `/clinica/pets`
/// all resolve to the clinic.
pub fn resolve(path: &str) -> ModuleContext {
    Module::ALL
        .into_iter()
        .find(|m| path.strip_prefix('/').is_some_and(|rest| rest.starts_with(m.slug())))
        .map_or(ModuleContext::NONE, |module| ModuleContext {
            module: Some(module),
            display_color: module.display_color(),
            display_name: module.display_name(),
        })
}

/// Prefix `path` with the active module, or return it unchanged outside one.
pub fn module_route(context: &ModuleContext, path: &str) -> String {
    match context.module {
        Some(module) => format!("/{}/{}", module.slug(), path.trim_start_matches('/')),
        None => path.to_owned(),
    }
}

/// One entry on the module-selection page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleCard {
    pub module: Module,
    /// Panel the user holds for this module, if any.
    pub panel_id: Option<String>,
    /// Whether that panel is the user's currently selected one.
    pub is_active: bool,
}

impl ModuleCard {
    pub fn is_available(&self) -> bool {
        self.panel_id.is_some()
    }
}

/// Build the selection cards for `user`, in fixed module order.
pub fn module_cards(user: &User) -> Vec<ModuleCard> {
    Module::ALL
        .into_iter()
        .map(|module| {
            let panel_id = user
                .panels
                .iter()
                .find(|p| Module::from_panel_type(&p.panel_type) == Some(module))
                .map(|p| p.id.clone());
            let is_active = panel_id.is_some() && panel_id == user.panel_id;
            ModuleCard { module, panel_id, is_active }
        })
        .collect()
}
