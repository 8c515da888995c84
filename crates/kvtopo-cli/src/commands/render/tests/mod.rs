mod tests_run;
