mod prop_aggregate;
