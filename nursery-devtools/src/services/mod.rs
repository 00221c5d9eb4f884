pub mod api_checks;
pub mod login_checker;
pub mod seeder;
