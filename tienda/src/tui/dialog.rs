//! Modal message boxes

use shared::{AppError, ErrorCode};

/// Action waiting for a yes/no answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Delete(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Warning,
    Error,
    Confirm(ConfirmAction),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

impl Dialog {
    fn new(kind: DialogKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DialogKind::Info, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DialogKind::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DialogKind::Error, title, message)
    }

    pub fn confirm_delete(id: i64) -> Self {
        Self::new(
            DialogKind::Confirm(ConfirmAction::Delete(id)),
            "Confirmar",
            "¿Estás seguro de que quieres eliminar este producto?",
        )
    }

    /// Warning for problems the user can fix, error for storage failures
    pub fn from_error(err: &AppError) -> Self {
        if err.is_validation() {
            let title = match err.code {
                ErrorCode::ProductNotSelected => "Selección",
                _ => "Validación",
            };
            return Self::warning(title, err.message.clone());
        }

        let message = match err.code {
            ErrorCode::StorageWriteFailed => format!("Error guardando: {}", err.message),
            ErrorCode::StorageReadFailed => format!("Error leyendo datos: {}", err.message),
            ErrorCode::StorageCorrupted => {
                format!("Archivo de datos dañado, no se modificará: {}", err.message)
            }
            _ => err.message.clone(),
        };
        Self::error("Error", message)
    }

    pub fn is_confirm(&self) -> bool {
        matches!(self.kind, DialogKind::Confirm(_))
    }

    /// Key hint shown under the message
    pub fn hint(&self) -> &'static str {
        if self.is_confirm() {
            "[S]í / [N]o"
        } else {
            "[Enter] Aceptar"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_validation_error() {
        let dialog = Dialog::from_error(&AppError::new(ErrorCode::ProductInvalidPrice));
        assert_eq!(dialog.kind, DialogKind::Warning);
        assert_eq!(dialog.title, "Validación");
        assert_eq!(dialog.message, "Precio debe ser un número");
    }

    #[test]
    fn test_from_selection_error() {
        let err = AppError::with_message(
            ErrorCode::ProductNotSelected,
            "Selecciona un producto para eliminar",
        );
        let dialog = Dialog::from_error(&err);
        assert_eq!(dialog.kind, DialogKind::Warning);
        assert_eq!(dialog.title, "Selección");
    }

    #[test]
    fn test_from_write_error() {
        let dialog = Dialog::from_error(&AppError::storage_write("Permission denied"));
        assert_eq!(dialog.kind, DialogKind::Error);
        assert_eq!(dialog.title, "Error");
        assert_eq!(dialog.message, "Error guardando: Permission denied");
    }

    #[test]
    fn test_confirm_delete() {
        let dialog = Dialog::confirm_delete(3);
        assert!(dialog.is_confirm());
        assert_eq!(dialog.kind, DialogKind::Confirm(ConfirmAction::Delete(3)));
        assert_eq!(dialog.hint(), "[S]í / [N]o");
        assert_eq!(Dialog::info("Éxito", "ok").hint(), "[Enter] Aceptar");
    }
}
