mod document_compiler_tests;
