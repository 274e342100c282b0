mod screen_state;
