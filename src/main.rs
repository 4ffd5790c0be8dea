fn main() {
    arthouse_showtimes::start();
}
