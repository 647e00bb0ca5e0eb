#[cfg(test)]
mod common;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod admin_tests;

#[cfg(test)]
mod client_tests;

#[cfg(test)]
mod health_tests;

#[cfg(test)]
mod http_client_tests;
