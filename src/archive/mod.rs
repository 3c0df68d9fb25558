pub mod weather_archive;
