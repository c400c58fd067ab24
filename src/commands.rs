use crate::app::AttributeApp;
use crate::logger::{LogEntry, LogLevel, LOGGER};
use crate::models::AttributeType;
use tauri::State;

// Managed state holding the attribute type backend
pub struct AttributeState {
    pub app: AttributeApp,
}

impl AttributeState {
    pub fn new(app: AttributeApp) -> Self {
        Self { app }
    }
}

/// Install the attribute type state and command handlers on a host builder
pub fn register<R: tauri::Runtime>(
    builder: tauri::Builder<R>,
    app: AttributeApp,
) -> tauri::Builder<R> {
    builder
        .manage(AttributeState::new(app))
        .invoke_handler(tauri::generate_handler![
            create_attribute_type,
            get_attribute_type,
            update_attribute_type,
            delete_attribute_type,
            list_attribute_types,
            validate_attribute_value,
            log_add,
            log_get,
            log_clear,
            log_set_min_level,
            log_get_min_level,
        ])
}

#[tauri::command]
pub fn create_attribute_type(
    state: State<'_, AttributeState>,
    name: String,
    pattern: String,
) -> Result<AttributeType, String> {
    Ok(state.app.create_attribute_type(&name, &pattern)?)
}

#[tauri::command]
pub fn get_attribute_type(
    state: State<'_, AttributeState>,
    id: String,
) -> Result<AttributeType, String> {
    Ok(state.app.get_attribute_type(&id)?)
}

#[tauri::command]
pub fn update_attribute_type(
    state: State<'_, AttributeState>,
    id: String,
    name: String,
    pattern: String,
) -> Result<AttributeType, String> {
    Ok(state.app.update_attribute_type(&id, &name, &pattern)?)
}

#[tauri::command]
pub fn delete_attribute_type(state: State<'_, AttributeState>, id: String) -> Result<(), String> {
    Ok(state.app.delete_attribute_type(&id)?)
}

#[tauri::command]
pub fn list_attribute_types(
    state: State<'_, AttributeState>,
) -> Result<Vec<AttributeType>, String> {
    Ok(state.app.list_attribute_types()?)
}

#[tauri::command]
pub fn validate_attribute_value(
    state: State<'_, AttributeState>,
    attribute_type_name: String,
    value: String,
) -> Result<(), String> {
    Ok(state
        .app
        .validate_attribute_value(&attribute_type_name, &value)?)
}

/// Record a frontend log entry
#[tauri::command]
pub fn log_add(level: String, message: String) -> Result<(), String> {
    let level = LogLevel::parse(&level).ok_or_else(|| format!("Invalid log level: {}", level))?;
    LOGGER.log(level, &message, "frontend");
    Ok(())
}

/// Recent log entries, optionally only those at or above `min_level`
#[tauri::command]
pub fn log_get(min_level: Option<String>) -> Vec<LogEntry> {
    match min_level.as_deref().and_then(LogLevel::parse) {
        Some(level) => LOGGER.get_logs_at_least(level),
        None => LOGGER.get_logs(),
    }
}

#[tauri::command]
pub fn log_clear() {
    LOGGER.clear_logs();
}

#[tauri::command]
pub fn log_set_min_level(level: String) -> Result<(), String> {
    let level = LogLevel::parse(&level).ok_or_else(|| format!("Invalid log level: {}", level))?;
    LOGGER.set_min_level(level);
    Ok(())
}

#[tauri::command]
pub fn log_get_min_level() -> LogLevel {
    LOGGER.get_min_level()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_add_records_frontend_entry() {
        log_add("warn".to_string(), "frontend entry 7".to_string()).unwrap();

        assert!(log_get(None)
            .iter()
            .any(|e| e.message == "frontend entry 7" && e.source == "frontend"));
    }

    #[test]
    fn test_log_add_rejects_unknown_level() {
        assert!(log_add("verbose".to_string(), "x".to_string()).is_err());
        assert!(log_set_min_level("verbose".to_string()).is_err());
    }

    #[test]
    fn test_log_get_filters_without_changing_min_level() {
        let before = log_get_min_level();
        log_add("error".to_string(), "filtered entry 9".to_string()).unwrap();

        let errors = log_get(Some("error".to_string()));
        assert!(errors.iter().all(|e| e.level == LogLevel::Error));
        assert!(errors.iter().any(|e| e.message == "filtered entry 9"));
        assert_eq!(log_get_min_level(), before);
    }
}
