mod tests_draft_workflow;
