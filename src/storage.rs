//! Settings persistence in `localStorage`.

use log::warn;

use crate::model::Settings;

pub const SETTINGS_KEY: &str = "sw_settings";

/// Parses stored settings, falling back to defaults on malformed JSON.
pub fn parse_settings(raw: &str) -> Settings {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        warn!("discarding stored settings: {}", e);
        Settings::default()
    })
}

pub fn load_settings() -> Option<Settings> {
    let win = web_sys::window()?;
    let store = win.local_storage().ok()??;
    let raw = store.get_item(SETTINGS_KEY).ok()??;
    Some(parse_settings(&raw))
}

pub fn save_settings(settings: &Settings) {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(s) = serde_json::to_string(settings) {
                let _ = store.set_item(SETTINGS_KEY, &s);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_saved_settings() {
        let s = parse_settings("{\"show_history\":false,\"log_gestures\":true}");
        assert_eq!(
            s,
            Settings {
                show_history: false,
                log_gestures: true
            }
        );
    }

    #[test]
    fn malformed_settings_fall_back_to_defaults() {
        assert_eq!(parse_settings("not json"), Settings::default());
        assert_eq!(parse_settings("[1,2]"), Settings::default());
    }

    #[test]
    fn saved_form_parses_back() {
        let s = Settings {
            show_history: false,
            log_gestures: false,
        };
        let raw = serde_json::to_string(&s).unwrap();
        assert_eq!(parse_settings(&raw), s);
    }
}
