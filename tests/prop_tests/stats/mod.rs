mod prop_stats;
