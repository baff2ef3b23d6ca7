pub mod p910_price_margin;
