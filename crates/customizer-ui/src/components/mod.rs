pub(crate) mod arrow_button;
pub(crate) mod article;
pub(crate) mod article_params_form;
pub(crate) mod button;
pub(crate) mod radio_group;
pub(crate) mod select;
pub(crate) mod separator;
pub(crate) mod text;
