pub mod folder;
pub mod new;
pub mod recent;
pub mod templates;
