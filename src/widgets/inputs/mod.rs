pub mod button;
pub mod checkbox;
pub mod text;
pub mod text_edit;
