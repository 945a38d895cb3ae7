mod referenced_type_set_tests;
