pub mod contact_form;
pub mod nav;
pub mod overlay;
pub mod sections;
