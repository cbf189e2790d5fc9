mod signup_data;

pub use signup_data::SignupData;
