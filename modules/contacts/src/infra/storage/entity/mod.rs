pub mod address;
pub mod contact;
pub mod document_type;
pub mod phone;
