// UI Module
// Terminal front end for the RSA tool

pub mod menu;
