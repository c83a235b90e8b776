pub mod analyse_image_use_case;
