mod mod_render;
