//! UI Strings

/// Shown in place of the list when there are no tasks
pub const EMPTY_LIST: &str = "Давай придумаем чем заняться!";
pub const LOAD_SUCCESS: &str = "Файл загружен успешно!";
pub const LOAD_FAILURE_PREFIX: &str = "Ошибка загрузки файла: ";

pub const MARK_DONE: &str = "Выполнено";
pub const MARK_UNDONE: &str = "Не выполнено";
pub const EDIT: &str = "Редактировать";
pub const DELETE: &str = "Удалить";

pub const TITLE: &str = "Мои задачи";
pub const ADD: &str = "Добавить";
pub const SAVE: &str = "Сохранить";
pub const LOAD: &str = "Загрузить";
pub const NEW_TASK_PLACEHOLDER: &str = "Новая задача...";

/// Label of the toggle button for a task in state `done`
pub fn toggle_label(done: bool) -> &'static str {
    if done { MARK_UNDONE } else { MARK_DONE }
}

pub fn load_failure(detail: &str) -> String {
    format!("{}{}", LOAD_FAILURE_PREFIX, detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_label() {
        assert_eq!(toggle_label(false), "Выполнено");
        assert_eq!(toggle_label(true), "Не выполнено");
    }

    #[test]
    fn test_load_failure_carries_parse_detail() {
        let err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let message = load_failure(&err.to_string());
        assert!(message.starts_with("Ошибка загрузки файла: "));
        assert!(message.contains("line 1 column 2"));
    }
}
