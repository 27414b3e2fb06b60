//! Product form: input widgets and keyboard focus

use shared::ProductForm;
use tui_input::{Input, InputRequest};

/// The five editable inputs, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    Price,
    Image,
    Stock,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Description,
        FormField::Price,
        FormField::Image,
        FormField::Stock,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Nombre:",
            FormField::Description => "Descripción:",
            FormField::Price => "Precio:",
            FormField::Image => "Imagen (URL):",
            FormField::Stock => "Stock:",
        }
    }

    /// Enter inserts a newline instead of moving on
    pub fn is_multiline(&self) -> bool {
        matches!(self, FormField::Description)
    }

    /// Visible text rows
    pub fn height(&self) -> u16 {
        if self.is_multiline() { 3 } else { 1 }
    }
}

/// Form buttons, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Add,
    Update,
    Delete,
    Clear,
}

impl Button {
    pub const ALL: [Button; 4] = [Button::Add, Button::Update, Button::Delete, Button::Clear];

    pub fn label(&self) -> &'static str {
        match self {
            Button::Add => "Agregar",
            Button::Update => "Actualizar",
            Button::Delete => "Eliminar",
            Button::Clear => "Limpiar",
        }
    }

    pub fn shortcut(&self) -> &'static str {
        match self {
            Button::Add => "F2",
            Button::Update => "F3",
            Button::Delete => "F4",
            Button::Clear => "F5",
        }
    }
}

/// Widget holding keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FormField),
    Button(Button),
    Table,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FormField::Name)
    }
}

impl Focus {
    /// Tab order: fields, buttons, table
    const ORDER: [Focus; 10] = [
        Focus::Field(FormField::Name),
        Focus::Field(FormField::Description),
        Focus::Field(FormField::Price),
        Focus::Field(FormField::Image),
        Focus::Field(FormField::Stock),
        Focus::Button(Button::Add),
        Focus::Button(Button::Update),
        Focus::Button(Button::Delete),
        Focus::Button(Button::Clear),
        Focus::Table,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Text state of the form inputs
#[derive(Debug, Clone)]
pub struct FormState {
    name: Input,
    description: Input,
    price: Input,
    image: Input,
    stock: Input,
}

impl Default for FormState {
    fn default() -> Self {
        let mut state = Self {
            name: Input::default(),
            description: Input::default(),
            price: Input::default(),
            image: Input::default(),
            stock: Input::default(),
        };
        state.clear();
        state
    }
}

impl FormState {
    pub fn input(&self, field: FormField) -> &Input {
        match field {
            FormField::Name => &self.name,
            FormField::Description => &self.description,
            FormField::Price => &self.price,
            FormField::Image => &self.image,
            FormField::Stock => &self.stock,
        }
    }

    pub fn input_mut(&mut self, field: FormField) -> &mut Input {
        match field {
            FormField::Name => &mut self.name,
            FormField::Description => &mut self.description,
            FormField::Price => &mut self.price,
            FormField::Image => &mut self.image,
            FormField::Stock => &mut self.stock,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        self.input(field).value()
    }

    /// Replace the text of one input, cursor at the end
    pub fn set_value(&mut self, field: FormField, value: impl Into<String>) {
        *self.input_mut(field) = Input::new(value.into());
    }

    /// Insert a line break at the cursor
    pub fn insert_newline(&mut self, field: FormField) {
        self.input_mut(field).handle(InputRequest::InsertChar('\n'));
    }

    /// Fill every input from raw form text
    pub fn load(&mut self, form: &ProductForm) {
        self.set_value(FormField::Name, form.name.clone());
        self.set_value(FormField::Description, form.description.clone());
        self.set_value(FormField::Price, form.price.clone());
        self.set_value(FormField::Image, form.image.clone());
        self.set_value(FormField::Stock, form.stock.clone());
    }

    /// Empty inputs, stock back to "0"
    pub fn clear(&mut self) {
        self.load(&ProductForm::default());
    }

    /// Snapshot of the current text
    pub fn to_form(&self) -> ProductForm {
        ProductForm {
            name: self.name.value().to_string(),
            description: self.description.value().to_string(),
            price: self.price.value().to_string(),
            image: self.image.value().to_string(),
            stock: self.stock.value().to_string(),
        }
    }
}

/// Row and column of a char-indexed cursor inside multi-line text
pub fn cursor_row_col(text: &str, cursor: usize) -> (usize, usize) {
    let before: String = text.chars().take(cursor).collect();
    let row = before.matches('\n').count();
    let col = before
        .rsplit('\n')
        .next()
        .map(|line| line.chars().count())
        .unwrap_or(0);
    (row, col)
}
