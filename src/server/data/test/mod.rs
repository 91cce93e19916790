mod category;
mod question;
