pub mod period;
pub mod variable;
pub mod weather_record;
