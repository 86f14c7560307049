mod keyword_analyzer_test;
