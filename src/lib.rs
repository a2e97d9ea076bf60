pub mod angle;
pub mod basis;
pub mod conjunction;
pub mod constants;
pub mod params;
pub mod rvbasis_errors;
