mod field_lookup_tests;
