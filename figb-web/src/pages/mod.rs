pub mod categorie;
pub mod churn;
pub mod demografia;
pub mod not_found;
pub mod overview;
pub mod regionale;
pub mod retention;
pub mod statistiche;
pub mod temporale;
pub mod tessere;
