pub use super::drone::Entity as Drone;
pub use super::load::Entity as Load;
pub use super::load_medication::Entity as LoadMedication;
pub use super::medication::Entity as Medication;
