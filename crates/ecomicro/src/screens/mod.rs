pub mod favorites;
pub mod guide;
pub mod home;
pub mod onboarding;
pub mod species_detail;
pub mod splash;
pub mod tips;
