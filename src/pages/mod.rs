pub mod about;
pub mod admin;
pub mod cancel;
pub mod change_password;
pub mod forget_password;
pub mod home;
pub mod k8s;
pub mod landing;
pub mod login;
pub mod logout;
pub mod maintenance;
pub mod new_password;
pub mod not_found;
pub mod otp;
pub mod profile;
pub mod root;
pub mod signup;
pub mod success;
pub mod vm;
