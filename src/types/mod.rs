pub mod lat_lon;
pub mod month;
pub mod observation;
pub mod records;
