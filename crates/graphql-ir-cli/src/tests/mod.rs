mod cli_tests;
mod input_files_tests;
