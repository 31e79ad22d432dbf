mod alerts_tests;
mod competition_tests;
