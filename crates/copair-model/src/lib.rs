pub mod administration;
pub mod pair;

pub use administration::{AdministrationInstance, SingleDrugAdministration};
pub use pair::DrugPair;
