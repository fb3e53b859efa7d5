mod mod_fit;
