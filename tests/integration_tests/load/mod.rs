mod mod_load;
