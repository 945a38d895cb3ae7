mod operation_identity_tests;
