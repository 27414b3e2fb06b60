//! Error codes for the product editor
//!
//! Error codes are organized by category:
//! - 6xxx: Product errors (form input, selection)
//! - 9xxx: System errors (data file)

use std::fmt;

/// Unified error code enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 6xxx: Product ====================
    /// Price is not a number
    ProductInvalidPrice = 6002,
    /// Stock is not an integer
    ProductInvalidStock = 6003,
    /// Product name is empty
    ProductNameRequired = 6004,
    /// Operation requires a selected product
    ProductNotSelected = 6005,

    // ==================== 9xxx: System ====================
    /// Data file could not be read
    StorageReadFailed = 9402,
    /// Data file is damaged (not a valid product list)
    StorageCorrupted = 9403,
    /// Data file could not be written
    StorageWriteFailed = 9405,
    /// The highest stored id leaves no room for a new one
    StorageIdExhausted = 9406,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default user-facing message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ProductInvalidPrice => "Precio debe ser un número",
            ErrorCode::ProductInvalidStock => "Stock debe ser un número",
            ErrorCode::ProductNameRequired => "El nombre es obligatorio",
            ErrorCode::ProductNotSelected => "Selecciona un producto",

            ErrorCode::StorageReadFailed => "No se pudo leer el archivo de datos",
            ErrorCode::StorageCorrupted => "El archivo de datos está dañado",
            ErrorCode::StorageWriteFailed => "No se pudo escribir el archivo de datos",
            ErrorCode::StorageIdExhausted => "No quedan IDs disponibles para un producto nuevo",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
