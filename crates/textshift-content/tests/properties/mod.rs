mod case;
mod html;
mod markdown;
mod slug;
