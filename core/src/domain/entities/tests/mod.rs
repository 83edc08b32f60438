mod book_tests;
mod token_tests;
