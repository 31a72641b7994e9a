mod auth_tests;
mod file_tests;
mod health_tests;
mod renter_tests;
mod station_tests;
