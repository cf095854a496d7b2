mod tests_integrate_pipeline;
