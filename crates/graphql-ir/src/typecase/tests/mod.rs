mod partition_invariant_tests;
