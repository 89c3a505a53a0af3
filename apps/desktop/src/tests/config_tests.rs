use super::*;

use std::collections::HashMap;

fn base() -> Settings {
    Settings {
        backend_base: "https://ttuns.vercel.app".into(),
        default_year: 2025,
        default_semester: "3".into(),
        request_timeout_secs: None,
    }
}

#[test]
fn default_year_tracks_current_calendar_year() {
    assert_eq!(Settings::default().default_year, chrono::Local::now().year());
    assert_eq!(Settings::default().default_semester, "3");
}

#[test]
fn default_backend_is_used_over_client_fallback() {
    let endpoint = client_core::search_endpoint(&Settings::default().backend_base)
        .expect("endpoint");
    assert_eq!(endpoint.as_str(), "https://ttuns.vercel.app/api/snutt/search");
}

#[test]
fn file_values_override_defaults() {
    let mut settings = base();
    apply_file(
        &mut settings,
        r#"
backend_base = "http://127.0.0.1:3000"
default_year = 2024
default_semester = 1
request_timeout_secs = "15"
"#,
    );

    assert_eq!(settings.backend_base, "http://127.0.0.1:3000");
    assert_eq!(settings.default_year, 2024);
    assert_eq!(settings.default_semester, "1");
    assert_eq!(settings.request_timeout(), Some(Duration::from_secs(15)));
}

#[test]
fn unparsable_file_is_ignored() {
    let mut settings = base();
    apply_file(&mut settings, "backend_base = ");
    assert_eq!(settings, base());
}

#[test]
fn app_prefixed_env_wins_over_plain_env() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("TTUNS_BACKEND_BASE", "http://plain"),
        ("APP__BACKEND_BASE", "http://prefixed"),
        ("APP__DEFAULT_YEAR", " 2026 "),
        ("APP__DEFAULT_SEMESTER", "2"),
        ("APP__REQUEST_TIMEOUT_SECS", "nope"),
    ]);

    let mut settings = base();
    apply_env(&mut settings, |key| env.get(key).map(|v| v.to_string()));

    assert_eq!(settings.backend_base, "http://prefixed");
    assert_eq!(settings.default_year, 2026);
    assert_eq!(settings.default_semester, "2");
    assert_eq!(settings.request_timeout_secs, None);
}

#[test]
fn zero_timeout_means_transport_default() {
    let mut settings = base();
    settings.request_timeout_secs = Some(0);
    assert_eq!(settings.request_timeout(), None);
}
