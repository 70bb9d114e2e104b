mod test_utils;

mod booking_test;
mod middleware_test;
mod notifications_test;
mod profiles_test;
