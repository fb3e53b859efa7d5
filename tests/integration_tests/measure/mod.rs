mod mod_measure;
