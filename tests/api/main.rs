mod waitlist;
mod widget;
