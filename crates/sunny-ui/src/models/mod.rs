pub mod getaway_model;
