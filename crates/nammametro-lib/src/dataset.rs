//! Static description of the Bengaluru Namma Metro network.
//!
//! The tables below mirror the production rollout data: five lines, with
//! shared junction stations registered once per line that lists them.
//! Connections are loaded through the public network interface, so entries
//! whose endpoints never registered are dropped with a warning.

use tracing::warn;

use crate::network::MetroNetwork;

/// (name, line) for every station, in rollout order.
const STATIONS: &[(&str, &str)] = &[
    // Purple line
    ("Challaghatta", "Purple"),
    ("Kengeri", "Purple"),
    ("Kengeri Bus Terminal", "Purple"),
    ("Pattanagere", "Purple"),
    ("Jnanabharathi", "Purple"),
    ("Rajarajeshwari nagar", "Purple"),
    ("Nayandahalli", "Purple"),
    ("Mysuru Road", "Purple"),
    ("Deepanjali Nagar", "Purple"),
    ("Attiguppe", "Purple"),
    ("Vijaynagar", "Purple"),
    ("Hosahalli", "Purple"),
    ("Magadi Road", "Purple"),
    ("KSR City Railway Stn", "Purple"),
    ("Kempegowda Stn. Majestic -junction", "Purple"), // shared with the green line
    ("Central college", "Purple"),
    ("Vidhana soudha", "Purple"),
    ("Cubbon park", "Purple"),
    ("Mahatma Gandhi Road -junction", "Purple"), // shared with the pink line
    ("Triniti", "Purple"),
    ("Halasuru", "Purple"),
    ("Indiranagar", "Purple"),
    ("Swami Vivekananda Road", "Purple"),
    ("Bayappanahalli", "Purple"),
    ("Benniganahalli", "Purple"),
    ("KR Pura-junction", "Purple"), // shared with the blue line
    ("Singayyaapalya", "Purple"),
    ("Garudacharpalya", "Purple"),
    ("Hoodi", "Purple"),
    ("Seetharam Palya", "Purple"),
    ("Kundalahalli", "Purple"),
    ("NallurHalli", "Purple"),
    ("Sri Sathya Sai Hospital", "Purple"),
    ("Pattandur Agrahara", "Purple"),
    ("Kadugodi Tree Park", "Purple"),
    ("Channasandra (Hopefarm)", "Purple"),
    ("Whitefield Kadugodi", "Purple"),
    // Green line
    ("Madavara", "Green"),
    ("Chikkabidarakallu", "Green"),
    ("Manjunathanagar", "Green"),
    ("Nagasandra", "Green"),
    ("Dasarahalli", "Green"),
    ("Jalahalli", "Green"),
    ("Peenya Industry", "Green"),
    ("Peenya", "Green"),
    ("Goraguntepalya", "Green"),
    ("Yeshawanthpur", "Green"),
    ("Sandal Soap Factory", "Green"),
    ("Mahalakshmi", "Green"),
    ("Rajaji Nagar", "Green"),
    ("Kuvempu Road", "Green"),
    ("Srirampura", "Green"),
    ("Sampige Road", "Green"),
    ("Kempegowda Stn. Majestic -junction", "Green"), // shared with the purple line
    ("Chickpete", "Green"),
    ("Krishna Rajendra Market", "Green"),
    ("National College", "Green"),
    ("Lalbagh", "Green"),
    ("South End Cirle", "Green"),
    ("Jayanagar", "Green"),
    ("Rashtreeya Vidyalaya Road -junction", "Green"), // shared with the yellow line
    ("Banashankari", "Green"),
    ("Jayaprakash Nagar", "Green"),
    ("Yelachenahalli", "Green"),
    ("Konanakunte Cross", "Green"),
    ("Doddakallasandra", "Green"),
    ("Vajarahalli", "Green"),
    ("Thalaghattapura", "Green"),
    ("Silk Institute", "Green"),
    // Pink line
    ("Nagawara -junction", "Pink"), // shared with the blue line
    ("Kadagundanahalli", "Pink"),
    ("Venkateshpura", "Pink"),
    ("Tannery Road", "Pink"),
    ("Pottery Town", "Pink"),
    ("Cantonment", "Pink"),
    ("Shivajinagar", "Pink"),
    ("Mahatma Ghandi Road", "Pink"),
    ("Rashtriya Military School", "Pink"),
    ("Langford Town", "Pink"),
    ("Lakhasandra", "Pink"),
    ("Dairy Circle", "Pink"),
    ("Tavarekere", "Pink"),
    ("Jayadeva Hospital -junction", "Pink"), // shared with the yellow line
    ("JP Nagar 4th Phase", "Pink"),
    ("IIM Bangalore", "Pink"),
    ("Hullmavu", "Pink"),
    ("Kalena Agrahara", "Pink"),
    // Yellow line
    ("Rashtreeya Vidyalaya Road -junction", "Yellow"),
    ("Ragigudda", "Yellow"),
    ("Jayadeva Hospital -junction", "Yellow"),
    ("BTM Layout", "Yellow"),
    ("Central Silk Board-junction", "Yellow"), // shared with the blue line
    ("Bommanahalli", "Yellow"),
    ("Hongasandra", "Yellow"),
    ("Kudlu Gate", "Yellow"),
    ("Singasandra", "Yellow"),
    ("Hosa Road", "Yellow"),
    ("Beratena Agrahara", "Yellow"),
    ("Electronic City", "Yellow"),
    ("Konnapana Agrahara", "Yellow"),
    ("Huskur Road", "Yellow"),
    ("Hebbagodi", "Yellow"),
    ("Bommasandra", "Yellow"),
    // Blue line
    ("Kempegowda International Airport", "Blue"),
    ("Airport City", "Blue"),
    ("Doddajala", "Blue"),
    ("Bettahalasuru", "Blue"),
    ("Bagalur Cross", "Blue"),
    ("Yelahanka", "Blue"),
    ("Jakkur Cross", "Blue"),
    ("Kodigerehalli", "Blue"),
    ("Hebbal", "Blue"),
    ("Kempapura", "Blue"),
    ("Veerannapalya", "Blue"),
    ("Nagawara -junction", "Blue"),
    ("HBR Layout", "Blue"),
    ("Kalyan Nagar", "Blue"),
    ("HRBR Layout", "Blue"),
    ("Horamavu", "Blue"),
    ("Kasturinagar", "Blue"),
    ("KR Pura-junction", "Blue"),
    ("Mahadevapura", "Blue"),
    ("DRDO Sports Complex", "Blue"),
    ("Doddanekundi", "Blue"),
    ("ISRO (Karthik Nagar)", "Blue"),
    ("Marathahalli", "Blue"),
    ("Kadubeesanahalli", "Blue"),
    ("Devarabeesanahalli", "Blue"),
    ("Bellandur", "Blue"),
    ("Iblur", "Blue"),
    ("Agara Lake", "Blue"),
    ("HSR Layout", "Blue"),
    ("Central Silk Board-junction", "Blue"),
];

/// (station, station, minutes, rupees) for every connection.
const CONNECTIONS: &[(&str, &str, u32, f64)] = &[
    // Purple line
    ("Challaghatta", "Kengeri", 3, 3.2),
    ("Kengeri", "Kengeri Bus Terminal", 2, 2.6),
    ("Kengeri Bus Terminal", "Pattanagere", 2, 2.8),
    ("Pattanagere", "Jnanabharathi", 1, 3.1),
    ("Jnanabharathi", "Rajarajeshwari nagar", 3, 3.3),
    ("Rajarajeshwari nagar", "Nayandahalli", 3, 2.7),
    ("Nayandahalli", "Mysuru Road", 1, 2.9),
    ("Mysuru Road", "Deepanjali Nagar", 4, 2.5),
    ("Deepanjali Nagar", "Attiguppe", 1, 2.8),
    ("Attiguppe", "Vijaynagar", 3, 3.0),
    ("Vijaynagar", "Hosahalli", 4, 3.2),
    ("Hosahalli", "Magadi Road", 2, 3.1),
    ("Magadi Road", "KSR City Railway Stn", 6, 2.6),
    ("KSR City Railway Stn", "Kempegowda Stn. Majestic -junction", 1, 3.3),
    ("Kempegowda Stn. Majestic -junction", "Central college", 3, 3.4),
    ("Central college", "Vidhana soudha", 1, 2.9),
    ("Vidhana soudha", "Cubbon park", 2, 2.7),
    ("Cubbon park", "Mahatma Gandhi Road -junction", 1, 3.0),
    ("Mahatma Gandhi Road -junction", "Triniti", 4, 2.8),
    ("Triniti", "Halasuru", 3, 3.2),
    ("Halasuru", "Indiranagar", 4, 3.1),
    ("Indiranagar", "Swami Vivekananda Road", 2, 3.4),
    ("Swami Vivekananda Road", "Bayappanahalli", 3, 3.3),
    ("Bayappanahalli", "Benniganahalli", 3, 3.2),
    ("Benniganahalli", "KR Pura-junction", 4, 3.0),
    ("KR Pura-junction", "Singayyaapalya", 4, 3.1),
    ("Singayyaapalya", "Garudacharpalya", 3, 2.9),
    ("Garudacharpalya", "Hoodi", 2, 3.3),
    ("Hoodi", "Seetharam Palya", 4, 3.0),
    ("Seetharam Palya", "Kundalahalli", 1, 2.7),
    ("Kundalahalli", "NallurHalli", 3, 3.2),
    ("NallurHalli", "Sri Sathya Sai Hospital", 1, 2.8),
    ("Sri Sathya Sai Hospital", "Pattandur Agrahara", 2, 2.6),
    ("Pattandur Agrahara", "Kadugodi Tree Park", 3, 2.9),
    ("Kadugodi Tree Park", "Channasandra (Hopefarm)", 4, 3.0),
    ("Channasandra (Hopefarm)", "Whitefield Kadugodi", 2, 2.7),
    // Green line
    ("Madavara", "Chikkabidarakallu", 1, 3.4),
    ("Chikkabidarakallu", "Manjunathanagar", 2, 2.9),
    ("Manjunathanagar", "Nagasandra", 3, 3.1),
    ("Nagasandra", "Dasarahalli", 2, 2.8),
    ("Dasarahalli", "Jalahalli", 1, 2.7),
    ("Jalahalli", "Peenya Industry", 3, 3.0),
    ("Peenya Industry", "Peenya", 4, 2.9),
    ("Peenya", "Goraguntepalya", 3, 3.2),
    ("Goraguntepalya", "Yeshawanthpur", 3, 3.1),
    ("Yeshawanthpur", "Sandal Soap Factory", 4, 3.3),
    ("Sandal Soap Factory", "Mahalakshmi", 4, 3.0),
    ("Mahalakshmi", "Rajaji Nagar", 3, 3.2),
    ("Rajaji Nagar", "Kuvempu Road", 2, 2.9),
    ("Kuvempu Road", "Srirampura", 1, 3.1),
    ("Srirampura", "Sampige Road", 3, 3.0),
    ("Sampige Road", "Kempegowda Stn. Majestic", 4, 2.8),
    ("Kempegowda Stn. Majestic", "Chickpete", 2, 2.7),
    ("Chickpete", "Krishna Rajendra Market", 1, 2.9),
    ("Krishna Rajendra Market", "National College", 3, 2.6),
    ("National College", "Lalbagh", 3, 3.0),
    ("Lalbagh", "South End Circle", 2, 2.8),
    ("South End Circle", "Jayanagar", 3, 3.2),
    ("Jayanagar", "Rashtreeya Vidyalaya Road -junction", 4, 3.1),
    ("Rashtreeya Vidyalaya Road -junction", "Banashankari", 4, 3.3),
    ("Banashankari", "Jayaprakash Nagar", 3, 2.9),
    ("Jayaprakash Nagar", "Yelachenahalli", 2, 3.1),
    ("Yelachenahalli", "Konanakunte Cross", 1, 2.8),
    ("Konanakunte Cross", "Doddakallasandra", 3, 3.0),
    ("Doddakallasandra", "Vajarahalli", 3, 2.9),
    ("Vajarahalli", "Thalaghattapura", 2, 3.2),
    ("Thalaghattapura", "Silk Institute", 3, 3.1),
    // Pink line
    ("Nagawara -junction", "Kadagundanahalli", 1, 3.5),
    ("Kadagundanahalli", "Venkateshpura", 2, 3.0),
    ("Venkateshpura", "Tannery Road", 3, 3.2),
    ("Tannery Road", "Pottery Town", 2, 2.9),
    ("Pottery Town", "Cantonment", 1, 3.1),
    ("Cantonment", "Shivajinagar", 3, 3.0),
    ("Shivajinagar", "Mahatma Gandhi Road -junction", 1, 2.7),
    ("Mahatma Gandhi Road -junction", "Rashtriya Military School", 2, 2.6),
    ("Rashtriya Military School", "Langford Town", 8, 2.9),
    ("Langford Town", "Lakhasandra", 3, 3.3),
    ("Lakhasandra", "Dairy Circle", 2, 3.1),
    ("Dairy Circle", "Tavarekere", 4, 2.8),
    ("Tavarekere", "Jayadeva Hospital -junction", 3, 3.0),
    ("Jayadeva Hospital -junction", "JP Nagar 4th Phase", 4, 3.2),
    ("JP Nagar 4th Phase", "IIM Bangalore", 3, 2.9),
    ("IIM Bangalore", "Hullmavu", 2, 3.1),
    ("Hullmavu", "Kalena Agrahara", 1, 2.8),
    // Yellow line
    ("Rashtreeya Vidyalaya Road -junction", "Ragigudda", 3, 2.9),
    ("Ragigudda", "Jayadeva Hospital -junction", 2, 3.1),
    ("Jayadeva Hospital -junction", "BTM Layout", 1, 2.8),
    ("BTM Layout", "Central Silk Board-junction", 3, 2.7),
    ("Central Silk Board-junction", "Bommanahalli", 4, 2.9),
    ("Bommanahalli", "Hongasandra", 3, 3.0),
    ("Hongasandra", "Kudlu Gate", 2, 2.8),
    ("Kudlu Gate", "Singasandra", 1, 3.1),
    ("Singasandra", "Hosa Road", 3, 2.9),
    ("Hosa Road", "Beratena Agrahara", 2, 3.0),
    ("Beratena Agrahara", "Electronic City", 2, 3.2),
    ("Electronic City", "Konnapana Agrahara", 3, 2.7),
    ("Konnapana Agrahara", "Huskur Road", 2, 3.1),
    ("Huskur Road", "Hebbagodi", 1, 2.8),
    ("Hebbagodi", "Bommasandra", 3, 3.0),
    // Blue line
    ("Kempegowda International Airport", "Airport City", 3, 2.8),
    ("Airport City", "Doddajala", 2, 3.0),
    ("Doddajala", "Bettahalasuru", 1, 2.9),
    ("Bettahalasuru", "Bagalur Cross", 3, 3.1),
    ("Bagalur Cross", "Yelahanka", 2, 2.8),
    ("Yelahanka", "Jakkur Cross", 1, 3.0),
    ("Jakkur Cross", "Kodigerehalli", 3, 2.9),
    ("Kodigerehalli", "Hebbal", 2, 3.1),
    ("Hebbal", "Kempapura", 1, 2.8),
    ("Kempapura", "Veerannapalya", 3, 3.0),
    ("Veerannapalya", "Nagawara -junction", 2, 2.9),
    ("Nagawara -junction", "HBR Layout", 1, 3.1),
    ("HBR Layout", "Kalyan Nagar", 3, 2.8),
    ("Kalyan Nagar", "HRBR Layout", 2, 3.0),
    ("HRBR Layout", "Horamavu", 1, 2.9),
    ("Horamavu", "Kasturinagar", 3, 3.1),
    ("Kasturinagar", "KR Pura-junction", 2, 2.8),
    ("KR Pura-junction", "Mahadevapura", 1, 3.0),
    ("Mahadevapura", "DRDO Sports Complex", 3, 2.9),
    ("DRDO Sports Complex", "Doddanekundi", 2, 3.1),
    ("Doddanekundi", "ISRO (Karthik Nagar)", 1, 2.8),
    ("ISRO (Karthik Nagar)", "Marathahalli", 3, 3.0),
    ("Marathahalli", "Kadubeesanahalli", 2, 2.9),
    ("Kadubeesanahalli", "Devarabeesanahalli", 1, 3.1),
    ("Devarabeesanahalli", "Bellandur", 3, 2.8),
    ("Bellandur", "Iblur", 2, 3.0),
    ("Iblur", "Agara Lake", 1, 2.9),
    ("Agara Lake", "HSR Layout", 3, 3.1),
    ("HSR Layout", "Central Silk Board-junction", 2, 2.8),
];

/// Build the production metro network.
///
/// Stations that fail to register and connections with unresolvable
/// endpoints are skipped with a warning; the rest of the network loads
/// normally.
pub fn bengaluru_network() -> MetroNetwork {
    let mut network = MetroNetwork::new();
    for (name, line) in STATIONS {
        if let Err(error) = network.add_station(name, line) {
            warn!(%error, "skipping station");
        }
    }
    for (a, b, time, fare) in CONNECTIONS {
        network.add_connection(a, b, *time, *fare);
    }
    network
}
