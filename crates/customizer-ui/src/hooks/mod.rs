pub(crate) mod outside_click;

pub(crate) use outside_click::use_outside_click_close;
