use super::*;

#[test]
fn begin_logout_claims_once_until_released() {
    let logging_out = RwSignal::new(false);

    assert!(begin_logout(logging_out));
    assert!(!begin_logout(logging_out));
    assert!(logging_out.get_untracked());

    logging_out.set(false);
    assert!(begin_logout(logging_out));
}
