use crate::models::Product;

fn product(id: &str, name: &str, details: &str, price: &str, image: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        details: details.to_string(),
        price: price.to_string(),
        product_image: format!("uploads/{}", image),
    }
}

/// Catalog the process starts with. Id "5" is absent and prices carry a
/// trailing space; both are part of the published data.
pub fn seed_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Banana Split Ice Cream",
            "Ok, so we're a little bananas.  Maybe it's the Vanilla, Chocolate, Strawberry and Banana blend in our Banana Split Ice Cream.  Or maybe it's our colorful personality.",
            "74.95 ",
            "banana.png",
        ),
        product(
            "2",
            "Birthday Cake Ice Cream",
            "What's better than cake and ice cream?  How about cake IN ice cream!  Birthday Cake Dippin' Dots are a blend of White & Yellow Cake Batter Ice Cream, Icing flavored Ice Cream and Cake Bits!  Who wants seconds?!",
            "94.95 ",
            "birthday-cake.png",
        ),
        product(
            "3",
            "Blue Raspberry Ice",
            "Blue Raspberry flavored ice.",
            "54.95 ",
            "blu-raspberry.png",
        ),
        product(
            "4",
            "Candy Cane Ice Cream",
            "Candy Cane is a festive mix of cool red and green peppermint ice creams, swirled together with classic Vanilla ice cream, for your holiday enjoy-mint.",
            "44.95 ",
            "candy-cane.png",
        ),
        product(
            "6",
            "Chocolate Ice Cream",
            "Creamy Milk Chocolate Ice Cream. Someone pass the spoon!",
            "60.95 ",
            "chocolate-icecream.png",
        ),
        product(
            "7",
            "Cookie Monster Ice Cream",
            "Cookie Monster features blue Sugar Cookie flavored ice cream dots, packed with not one, but two delicious cookie doughs: Chocolate Chip Cookie Dough and Chocolate Sandwich Cookie Dough.",
            "74.95 ",
            "cookie-monster.png",
        ),
        product(
            "8",
            "Cookies 'n Cream Ice Cream",
            "It's a cookie invasion!  Oreo® Cookie Pieces surrounded by sweet Vanilla Ice Cream make Cookies 'n Cream America's #1 most wanted Dippin' Dots flavor.",
            "70.95 ",
            "cookies-cream.png",
        ),
    ]
}
