//! ISO 3166-1 reference list, generated from the Debian iso-codes
//! `iso_3166-1.json` data. Official and common names are kept because name
//! resolution matches against them.

/// One ISO 3166-1 entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub name: &'static str,
    pub official_name: Option<&'static str>,
    pub common_name: Option<&'static str>,
}

impl Country {
    /// Every name this entry is known by.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        [Some(self.name), self.official_name, self.common_name]
            .into_iter()
            .flatten()
    }
}

/// All assigned ISO 3166-1 codes, sorted by alpha-3.
pub static COUNTRIES: &[Country] = &[
    Country { alpha2: "AW", alpha3: "ABW", name: "Aruba", official_name: None, common_name: None },
    Country { alpha2: "AF", alpha3: "AFG", name: "Afghanistan", official_name: Some("Islamic Republic of Afghanistan"), common_name: None },
    Country { alpha2: "AO", alpha3: "AGO", name: "Angola", official_name: Some("Republic of Angola"), common_name: None },
    Country { alpha2: "AI", alpha3: "AIA", name: "Anguilla", official_name: None, common_name: None },
    Country { alpha2: "AX", alpha3: "ALA", name: "Åland Islands", official_name: None, common_name: None },
    Country { alpha2: "AL", alpha3: "ALB", name: "Albania", official_name: Some("Republic of Albania"), common_name: None },
    Country { alpha2: "AD", alpha3: "AND", name: "Andorra", official_name: Some("Principality of Andorra"), common_name: None },
    Country { alpha2: "AE", alpha3: "ARE", name: "United Arab Emirates", official_name: None, common_name: None },
    Country { alpha2: "AR", alpha3: "ARG", name: "Argentina", official_name: Some("Argentine Republic"), common_name: None },
    Country { alpha2: "AM", alpha3: "ARM", name: "Armenia", official_name: Some("Republic of Armenia"), common_name: None },
    Country { alpha2: "AS", alpha3: "ASM", name: "American Samoa", official_name: None, common_name: None },
    Country { alpha2: "AQ", alpha3: "ATA", name: "Antarctica", official_name: None, common_name: None },
    Country { alpha2: "TF", alpha3: "ATF", name: "French Southern Territories", official_name: None, common_name: None },
    Country { alpha2: "AG", alpha3: "ATG", name: "Antigua and Barbuda", official_name: None, common_name: None },
    Country { alpha2: "AU", alpha3: "AUS", name: "Australia", official_name: None, common_name: None },
    Country { alpha2: "AT", alpha3: "AUT", name: "Austria", official_name: Some("Republic of Austria"), common_name: None },
    Country { alpha2: "AZ", alpha3: "AZE", name: "Azerbaijan", official_name: Some("Republic of Azerbaijan"), common_name: None },
    Country { alpha2: "BI", alpha3: "BDI", name: "Burundi", official_name: Some("Republic of Burundi"), common_name: None },
    Country { alpha2: "BE", alpha3: "BEL", name: "Belgium", official_name: Some("Kingdom of Belgium"), common_name: None },
    Country { alpha2: "BJ", alpha3: "BEN", name: "Benin", official_name: Some("Republic of Benin"), common_name: None },
    Country { alpha2: "BQ", alpha3: "BES", name: "Bonaire, Sint Eustatius and Saba", official_name: Some("Bonaire, Sint Eustatius and Saba"), common_name: None },
    Country { alpha2: "BF", alpha3: "BFA", name: "Burkina Faso", official_name: None, common_name: None },
    Country { alpha2: "BD", alpha3: "BGD", name: "Bangladesh", official_name: Some("People's Republic of Bangladesh"), common_name: None },
    Country { alpha2: "BG", alpha3: "BGR", name: "Bulgaria", official_name: Some("Republic of Bulgaria"), common_name: None },
    Country { alpha2: "BH", alpha3: "BHR", name: "Bahrain", official_name: Some("Kingdom of Bahrain"), common_name: None },
    Country { alpha2: "BS", alpha3: "BHS", name: "Bahamas", official_name: Some("Commonwealth of the Bahamas"), common_name: None },
    Country { alpha2: "BA", alpha3: "BIH", name: "Bosnia and Herzegovina", official_name: Some("Republic of Bosnia and Herzegovina"), common_name: None },
    Country { alpha2: "BL", alpha3: "BLM", name: "Saint Barthélemy", official_name: None, common_name: None },
    Country { alpha2: "BY", alpha3: "BLR", name: "Belarus", official_name: Some("Republic of Belarus"), common_name: None },
    Country { alpha2: "BZ", alpha3: "BLZ", name: "Belize", official_name: None, common_name: None },
    Country { alpha2: "BM", alpha3: "BMU", name: "Bermuda", official_name: None, common_name: None },
    Country { alpha2: "BO", alpha3: "BOL", name: "Bolivia, Plurinational State of", official_name: Some("Plurinational State of Bolivia"), common_name: Some("Bolivia") },
    Country { alpha2: "BR", alpha3: "BRA", name: "Brazil", official_name: Some("Federative Republic of Brazil"), common_name: None },
    Country { alpha2: "BB", alpha3: "BRB", name: "Barbados", official_name: None, common_name: None },
    Country { alpha2: "BN", alpha3: "BRN", name: "Brunei Darussalam", official_name: None, common_name: None },
    Country { alpha2: "BT", alpha3: "BTN", name: "Bhutan", official_name: Some("Kingdom of Bhutan"), common_name: None },
    Country { alpha2: "BV", alpha3: "BVT", name: "Bouvet Island", official_name: None, common_name: None },
    Country { alpha2: "BW", alpha3: "BWA", name: "Botswana", official_name: Some("Republic of Botswana"), common_name: None },
    Country { alpha2: "CF", alpha3: "CAF", name: "Central African Republic", official_name: None, common_name: None },
    Country { alpha2: "CA", alpha3: "CAN", name: "Canada", official_name: None, common_name: None },
    Country { alpha2: "CC", alpha3: "CCK", name: "Cocos (Keeling) Islands", official_name: None, common_name: None },
    Country { alpha2: "CH", alpha3: "CHE", name: "Switzerland", official_name: Some("Swiss Confederation"), common_name: None },
    Country { alpha2: "CL", alpha3: "CHL", name: "Chile", official_name: Some("Republic of Chile"), common_name: None },
    Country { alpha2: "CN", alpha3: "CHN", name: "China", official_name: Some("People's Republic of China"), common_name: None },
    Country { alpha2: "CI", alpha3: "CIV", name: "Côte d'Ivoire", official_name: Some("Republic of Côte d'Ivoire"), common_name: None },
    Country { alpha2: "CM", alpha3: "CMR", name: "Cameroon", official_name: Some("Republic of Cameroon"), common_name: None },
    Country { alpha2: "CD", alpha3: "COD", name: "Congo, The Democratic Republic of the", official_name: None, common_name: None },
    Country { alpha2: "CG", alpha3: "COG", name: "Congo", official_name: Some("Republic of the Congo"), common_name: None },
    Country { alpha2: "CK", alpha3: "COK", name: "Cook Islands", official_name: None, common_name: None },
    Country { alpha2: "CO", alpha3: "COL", name: "Colombia", official_name: Some("Republic of Colombia"), common_name: None },
    Country { alpha2: "KM", alpha3: "COM", name: "Comoros", official_name: Some("Union of the Comoros"), common_name: None },
    Country { alpha2: "CV", alpha3: "CPV", name: "Cabo Verde", official_name: Some("Republic of Cabo Verde"), common_name: None },
    Country { alpha2: "CR", alpha3: "CRI", name: "Costa Rica", official_name: Some("Republic of Costa Rica"), common_name: None },
    Country { alpha2: "CU", alpha3: "CUB", name: "Cuba", official_name: Some("Republic of Cuba"), common_name: None },
    Country { alpha2: "CW", alpha3: "CUW", name: "Curaçao", official_name: Some("Curaçao"), common_name: None },
    Country { alpha2: "CX", alpha3: "CXR", name: "Christmas Island", official_name: None, common_name: None },
    Country { alpha2: "KY", alpha3: "CYM", name: "Cayman Islands", official_name: None, common_name: None },
    Country { alpha2: "CY", alpha3: "CYP", name: "Cyprus", official_name: Some("Republic of Cyprus"), common_name: None },
    Country { alpha2: "CZ", alpha3: "CZE", name: "Czechia", official_name: Some("Czech Republic"), common_name: None },
    Country { alpha2: "DE", alpha3: "DEU", name: "Germany", official_name: Some("Federal Republic of Germany"), common_name: None },
    Country { alpha2: "DJ", alpha3: "DJI", name: "Djibouti", official_name: Some("Republic of Djibouti"), common_name: None },
    Country { alpha2: "DM", alpha3: "DMA", name: "Dominica", official_name: Some("Commonwealth of Dominica"), common_name: None },
    Country { alpha2: "DK", alpha3: "DNK", name: "Denmark", official_name: Some("Kingdom of Denmark"), common_name: None },
    Country { alpha2: "DO", alpha3: "DOM", name: "Dominican Republic", official_name: None, common_name: None },
    Country { alpha2: "DZ", alpha3: "DZA", name: "Algeria", official_name: Some("People's Democratic Republic of Algeria"), common_name: None },
    Country { alpha2: "EC", alpha3: "ECU", name: "Ecuador", official_name: Some("Republic of Ecuador"), common_name: None },
    Country { alpha2: "EG", alpha3: "EGY", name: "Egypt", official_name: Some("Arab Republic of Egypt"), common_name: None },
    Country { alpha2: "ER", alpha3: "ERI", name: "Eritrea", official_name: Some("the State of Eritrea"), common_name: None },
    Country { alpha2: "EH", alpha3: "ESH", name: "Western Sahara", official_name: None, common_name: None },
    Country { alpha2: "ES", alpha3: "ESP", name: "Spain", official_name: Some("Kingdom of Spain"), common_name: None },
    Country { alpha2: "EE", alpha3: "EST", name: "Estonia", official_name: Some("Republic of Estonia"), common_name: None },
    Country { alpha2: "ET", alpha3: "ETH", name: "Ethiopia", official_name: Some("Federal Democratic Republic of Ethiopia"), common_name: None },
    Country { alpha2: "FI", alpha3: "FIN", name: "Finland", official_name: Some("Republic of Finland"), common_name: None },
    Country { alpha2: "FJ", alpha3: "FJI", name: "Fiji", official_name: Some("Republic of Fiji"), common_name: None },
    Country { alpha2: "FK", alpha3: "FLK", name: "Falkland Islands (Malvinas)", official_name: None, common_name: None },
    Country { alpha2: "FR", alpha3: "FRA", name: "France", official_name: Some("French Republic"), common_name: None },
    Country { alpha2: "FO", alpha3: "FRO", name: "Faroe Islands", official_name: None, common_name: None },
    Country { alpha2: "FM", alpha3: "FSM", name: "Micronesia, Federated States of", official_name: Some("Federated States of Micronesia"), common_name: None },
    Country { alpha2: "GA", alpha3: "GAB", name: "Gabon", official_name: Some("Gabonese Republic"), common_name: None },
    Country { alpha2: "GB", alpha3: "GBR", name: "United Kingdom", official_name: Some("United Kingdom of Great Britain and Northern Ireland"), common_name: None },
    Country { alpha2: "GE", alpha3: "GEO", name: "Georgia", official_name: None, common_name: None },
    Country { alpha2: "GG", alpha3: "GGY", name: "Guernsey", official_name: None, common_name: None },
    Country { alpha2: "GH", alpha3: "GHA", name: "Ghana", official_name: Some("Republic of Ghana"), common_name: None },
    Country { alpha2: "GI", alpha3: "GIB", name: "Gibraltar", official_name: None, common_name: None },
    Country { alpha2: "GN", alpha3: "GIN", name: "Guinea", official_name: Some("Republic of Guinea"), common_name: None },
    Country { alpha2: "GP", alpha3: "GLP", name: "Guadeloupe", official_name: None, common_name: None },
    Country { alpha2: "GM", alpha3: "GMB", name: "Gambia", official_name: Some("Republic of the Gambia"), common_name: None },
    Country { alpha2: "GW", alpha3: "GNB", name: "Guinea-Bissau", official_name: Some("Republic of Guinea-Bissau"), common_name: None },
    Country { alpha2: "GQ", alpha3: "GNQ", name: "Equatorial Guinea", official_name: Some("Republic of Equatorial Guinea"), common_name: None },
    Country { alpha2: "GR", alpha3: "GRC", name: "Greece", official_name: Some("Hellenic Republic"), common_name: None },
    Country { alpha2: "GD", alpha3: "GRD", name: "Grenada", official_name: None, common_name: None },
    Country { alpha2: "GL", alpha3: "GRL", name: "Greenland", official_name: None, common_name: None },
    Country { alpha2: "GT", alpha3: "GTM", name: "Guatemala", official_name: Some("Republic of Guatemala"), common_name: None },
    Country { alpha2: "GF", alpha3: "GUF", name: "French Guiana", official_name: None, common_name: None },
    Country { alpha2: "GU", alpha3: "GUM", name: "Guam", official_name: None, common_name: None },
    Country { alpha2: "GY", alpha3: "GUY", name: "Guyana", official_name: Some("Republic of Guyana"), common_name: None },
    Country { alpha2: "HK", alpha3: "HKG", name: "Hong Kong", official_name: Some("Hong Kong Special Administrative Region of China"), common_name: None },
    Country { alpha2: "HM", alpha3: "HMD", name: "Heard Island and McDonald Islands", official_name: None, common_name: None },
    Country { alpha2: "HN", alpha3: "HND", name: "Honduras", official_name: Some("Republic of Honduras"), common_name: None },
    Country { alpha2: "HR", alpha3: "HRV", name: "Croatia", official_name: Some("Republic of Croatia"), common_name: None },
    Country { alpha2: "HT", alpha3: "HTI", name: "Haiti", official_name: Some("Republic of Haiti"), common_name: None },
    Country { alpha2: "HU", alpha3: "HUN", name: "Hungary", official_name: Some("Hungary"), common_name: None },
    Country { alpha2: "ID", alpha3: "IDN", name: "Indonesia", official_name: Some("Republic of Indonesia"), common_name: None },
    Country { alpha2: "IM", alpha3: "IMN", name: "Isle of Man", official_name: None, common_name: None },
    Country { alpha2: "IN", alpha3: "IND", name: "India", official_name: Some("Republic of India"), common_name: None },
    Country { alpha2: "IO", alpha3: "IOT", name: "British Indian Ocean Territory", official_name: None, common_name: None },
    Country { alpha2: "IE", alpha3: "IRL", name: "Ireland", official_name: None, common_name: None },
    Country { alpha2: "IR", alpha3: "IRN", name: "Iran, Islamic Republic of", official_name: Some("Islamic Republic of Iran"), common_name: Some("Iran") },
    Country { alpha2: "IQ", alpha3: "IRQ", name: "Iraq", official_name: Some("Republic of Iraq"), common_name: None },
    Country { alpha2: "IS", alpha3: "ISL", name: "Iceland", official_name: Some("Republic of Iceland"), common_name: None },
    Country { alpha2: "IL", alpha3: "ISR", name: "Israel", official_name: Some("State of Israel"), common_name: None },
    Country { alpha2: "IT", alpha3: "ITA", name: "Italy", official_name: Some("Italian Republic"), common_name: None },
    Country { alpha2: "JM", alpha3: "JAM", name: "Jamaica", official_name: None, common_name: None },
    Country { alpha2: "JE", alpha3: "JEY", name: "Jersey", official_name: None, common_name: None },
    Country { alpha2: "JO", alpha3: "JOR", name: "Jordan", official_name: Some("Hashemite Kingdom of Jordan"), common_name: None },
    Country { alpha2: "JP", alpha3: "JPN", name: "Japan", official_name: None, common_name: None },
    Country { alpha2: "KZ", alpha3: "KAZ", name: "Kazakhstan", official_name: Some("Republic of Kazakhstan"), common_name: None },
    Country { alpha2: "KE", alpha3: "KEN", name: "Kenya", official_name: Some("Republic of Kenya"), common_name: None },
    Country { alpha2: "KG", alpha3: "KGZ", name: "Kyrgyzstan", official_name: Some("Kyrgyz Republic"), common_name: None },
    Country { alpha2: "KH", alpha3: "KHM", name: "Cambodia", official_name: Some("Kingdom of Cambodia"), common_name: None },
    Country { alpha2: "KI", alpha3: "KIR", name: "Kiribati", official_name: Some("Republic of Kiribati"), common_name: None },
    Country { alpha2: "KN", alpha3: "KNA", name: "Saint Kitts and Nevis", official_name: None, common_name: None },
    Country { alpha2: "KR", alpha3: "KOR", name: "Korea, Republic of", official_name: None, common_name: Some("South Korea") },
    Country { alpha2: "KW", alpha3: "KWT", name: "Kuwait", official_name: Some("State of Kuwait"), common_name: None },
    Country { alpha2: "LA", alpha3: "LAO", name: "Lao People's Democratic Republic", official_name: None, common_name: Some("Laos") },
    Country { alpha2: "LB", alpha3: "LBN", name: "Lebanon", official_name: Some("Lebanese Republic"), common_name: None },
    Country { alpha2: "LR", alpha3: "LBR", name: "Liberia", official_name: Some("Republic of Liberia"), common_name: None },
    Country { alpha2: "LY", alpha3: "LBY", name: "Libya", official_name: Some("Libya"), common_name: None },
    Country { alpha2: "LC", alpha3: "LCA", name: "Saint Lucia", official_name: None, common_name: None },
    Country { alpha2: "LI", alpha3: "LIE", name: "Liechtenstein", official_name: Some("Principality of Liechtenstein"), common_name: None },
    Country { alpha2: "LK", alpha3: "LKA", name: "Sri Lanka", official_name: Some("Democratic Socialist Republic of Sri Lanka"), common_name: None },
    Country { alpha2: "LS", alpha3: "LSO", name: "Lesotho", official_name: Some("Kingdom of Lesotho"), common_name: None },
    Country { alpha2: "LT", alpha3: "LTU", name: "Lithuania", official_name: Some("Republic of Lithuania"), common_name: None },
    Country { alpha2: "LU", alpha3: "LUX", name: "Luxembourg", official_name: Some("Grand Duchy of Luxembourg"), common_name: None },
    Country { alpha2: "LV", alpha3: "LVA", name: "Latvia", official_name: Some("Republic of Latvia"), common_name: None },
    Country { alpha2: "MO", alpha3: "MAC", name: "Macao", official_name: Some("Macao Special Administrative Region of China"), common_name: None },
    Country { alpha2: "MF", alpha3: "MAF", name: "Saint Martin (French part)", official_name: None, common_name: None },
    Country { alpha2: "MA", alpha3: "MAR", name: "Morocco", official_name: Some("Kingdom of Morocco"), common_name: None },
    Country { alpha2: "MC", alpha3: "MCO", name: "Monaco", official_name: Some("Principality of Monaco"), common_name: None },
    Country { alpha2: "MD", alpha3: "MDA", name: "Moldova, Republic of", official_name: Some("Republic of Moldova"), common_name: Some("Moldova") },
    Country { alpha2: "MG", alpha3: "MDG", name: "Madagascar", official_name: Some("Republic of Madagascar"), common_name: None },
    Country { alpha2: "MV", alpha3: "MDV", name: "Maldives", official_name: Some("Republic of Maldives"), common_name: None },
    Country { alpha2: "MX", alpha3: "MEX", name: "Mexico", official_name: Some("United Mexican States"), common_name: None },
    Country { alpha2: "MH", alpha3: "MHL", name: "Marshall Islands", official_name: Some("Republic of the Marshall Islands"), common_name: None },
    Country { alpha2: "MK", alpha3: "MKD", name: "North Macedonia", official_name: Some("Republic of North Macedonia"), common_name: None },
    Country { alpha2: "ML", alpha3: "MLI", name: "Mali", official_name: Some("Republic of Mali"), common_name: None },
    Country { alpha2: "MT", alpha3: "MLT", name: "Malta", official_name: Some("Republic of Malta"), common_name: None },
    Country { alpha2: "MM", alpha3: "MMR", name: "Myanmar", official_name: Some("Republic of Myanmar"), common_name: None },
    Country { alpha2: "ME", alpha3: "MNE", name: "Montenegro", official_name: Some("Montenegro"), common_name: None },
    Country { alpha2: "MN", alpha3: "MNG", name: "Mongolia", official_name: None, common_name: None },
    Country { alpha2: "MP", alpha3: "MNP", name: "Northern Mariana Islands", official_name: Some("Commonwealth of the Northern Mariana Islands"), common_name: None },
    Country { alpha2: "MZ", alpha3: "MOZ", name: "Mozambique", official_name: Some("Republic of Mozambique"), common_name: None },
    Country { alpha2: "MR", alpha3: "MRT", name: "Mauritania", official_name: Some("Islamic Republic of Mauritania"), common_name: None },
    Country { alpha2: "MS", alpha3: "MSR", name: "Montserrat", official_name: None, common_name: None },
    Country { alpha2: "MQ", alpha3: "MTQ", name: "Martinique", official_name: None, common_name: None },
    Country { alpha2: "MU", alpha3: "MUS", name: "Mauritius", official_name: Some("Republic of Mauritius"), common_name: None },
    Country { alpha2: "MW", alpha3: "MWI", name: "Malawi", official_name: Some("Republic of Malawi"), common_name: None },
    Country { alpha2: "MY", alpha3: "MYS", name: "Malaysia", official_name: None, common_name: None },
    Country { alpha2: "YT", alpha3: "MYT", name: "Mayotte", official_name: None, common_name: None },
    Country { alpha2: "NA", alpha3: "NAM", name: "Namibia", official_name: Some("Republic of Namibia"), common_name: None },
    Country { alpha2: "NC", alpha3: "NCL", name: "New Caledonia", official_name: None, common_name: None },
    Country { alpha2: "NE", alpha3: "NER", name: "Niger", official_name: Some("Republic of the Niger"), common_name: None },
    Country { alpha2: "NF", alpha3: "NFK", name: "Norfolk Island", official_name: None, common_name: None },
    Country { alpha2: "NG", alpha3: "NGA", name: "Nigeria", official_name: Some("Federal Republic of Nigeria"), common_name: None },
    Country { alpha2: "NI", alpha3: "NIC", name: "Nicaragua", official_name: Some("Republic of Nicaragua"), common_name: None },
    Country { alpha2: "NU", alpha3: "NIU", name: "Niue", official_name: Some("Niue"), common_name: None },
    Country { alpha2: "NL", alpha3: "NLD", name: "Netherlands", official_name: Some("Kingdom of the Netherlands"), common_name: None },
    Country { alpha2: "NO", alpha3: "NOR", name: "Norway", official_name: Some("Kingdom of Norway"), common_name: None },
    Country { alpha2: "NP", alpha3: "NPL", name: "Nepal", official_name: Some("Federal Democratic Republic of Nepal"), common_name: None },
    Country { alpha2: "NR", alpha3: "NRU", name: "Nauru", official_name: Some("Republic of Nauru"), common_name: None },
    Country { alpha2: "NZ", alpha3: "NZL", name: "New Zealand", official_name: None, common_name: None },
    Country { alpha2: "OM", alpha3: "OMN", name: "Oman", official_name: Some("Sultanate of Oman"), common_name: None },
    Country { alpha2: "PK", alpha3: "PAK", name: "Pakistan", official_name: Some("Islamic Republic of Pakistan"), common_name: None },
    Country { alpha2: "PA", alpha3: "PAN", name: "Panama", official_name: Some("Republic of Panama"), common_name: None },
    Country { alpha2: "PN", alpha3: "PCN", name: "Pitcairn", official_name: None, common_name: None },
    Country { alpha2: "PE", alpha3: "PER", name: "Peru", official_name: Some("Republic of Peru"), common_name: None },
    Country { alpha2: "PH", alpha3: "PHL", name: "Philippines", official_name: Some("Republic of the Philippines"), common_name: None },
    Country { alpha2: "PW", alpha3: "PLW", name: "Palau", official_name: Some("Republic of Palau"), common_name: None },
    Country { alpha2: "PG", alpha3: "PNG", name: "Papua New Guinea", official_name: Some("Independent State of Papua New Guinea"), common_name: None },
    Country { alpha2: "PL", alpha3: "POL", name: "Poland", official_name: Some("Republic of Poland"), common_name: None },
    Country { alpha2: "PR", alpha3: "PRI", name: "Puerto Rico", official_name: None, common_name: None },
    Country { alpha2: "KP", alpha3: "PRK", name: "Korea, Democratic People's Republic of", official_name: Some("Democratic People's Republic of Korea"), common_name: Some("North Korea") },
    Country { alpha2: "PT", alpha3: "PRT", name: "Portugal", official_name: Some("Portuguese Republic"), common_name: None },
    Country { alpha2: "PY", alpha3: "PRY", name: "Paraguay", official_name: Some("Republic of Paraguay"), common_name: None },
    Country { alpha2: "PS", alpha3: "PSE", name: "Palestine, State of", official_name: Some("the State of Palestine"), common_name: None },
    Country { alpha2: "PF", alpha3: "PYF", name: "French Polynesia", official_name: None, common_name: None },
    Country { alpha2: "QA", alpha3: "QAT", name: "Qatar", official_name: Some("State of Qatar"), common_name: None },
    Country { alpha2: "RE", alpha3: "REU", name: "Réunion", official_name: None, common_name: None },
    Country { alpha2: "RO", alpha3: "ROU", name: "Romania", official_name: None, common_name: None },
    Country { alpha2: "RU", alpha3: "RUS", name: "Russian Federation", official_name: None, common_name: None },
    Country { alpha2: "RW", alpha3: "RWA", name: "Rwanda", official_name: Some("Rwandese Republic"), common_name: None },
    Country { alpha2: "SA", alpha3: "SAU", name: "Saudi Arabia", official_name: Some("Kingdom of Saudi Arabia"), common_name: None },
    Country { alpha2: "SD", alpha3: "SDN", name: "Sudan", official_name: Some("Republic of the Sudan"), common_name: None },
    Country { alpha2: "SN", alpha3: "SEN", name: "Senegal", official_name: Some("Republic of Senegal"), common_name: None },
    Country { alpha2: "SG", alpha3: "SGP", name: "Singapore", official_name: Some("Republic of Singapore"), common_name: None },
    Country { alpha2: "GS", alpha3: "SGS", name: "South Georgia and the South Sandwich Islands", official_name: None, common_name: None },
    Country { alpha2: "SH", alpha3: "SHN", name: "Saint Helena, Ascension and Tristan da Cunha", official_name: None, common_name: None },
    Country { alpha2: "SJ", alpha3: "SJM", name: "Svalbard and Jan Mayen", official_name: None, common_name: None },
    Country { alpha2: "SB", alpha3: "SLB", name: "Solomon Islands", official_name: None, common_name: None },
    Country { alpha2: "SL", alpha3: "SLE", name: "Sierra Leone", official_name: Some("Republic of Sierra Leone"), common_name: None },
    Country { alpha2: "SV", alpha3: "SLV", name: "El Salvador", official_name: Some("Republic of El Salvador"), common_name: None },
    Country { alpha2: "SM", alpha3: "SMR", name: "San Marino", official_name: Some("Republic of San Marino"), common_name: None },
    Country { alpha2: "SO", alpha3: "SOM", name: "Somalia", official_name: Some("Federal Republic of Somalia"), common_name: None },
    Country { alpha2: "PM", alpha3: "SPM", name: "Saint Pierre and Miquelon", official_name: None, common_name: None },
    Country { alpha2: "RS", alpha3: "SRB", name: "Serbia", official_name: Some("Republic of Serbia"), common_name: None },
    Country { alpha2: "SS", alpha3: "SSD", name: "South Sudan", official_name: Some("Republic of South Sudan"), common_name: None },
    Country { alpha2: "ST", alpha3: "STP", name: "Sao Tome and Principe", official_name: Some("Democratic Republic of Sao Tome and Principe"), common_name: None },
    Country { alpha2: "SR", alpha3: "SUR", name: "Suriname", official_name: Some("Republic of Suriname"), common_name: None },
    Country { alpha2: "SK", alpha3: "SVK", name: "Slovakia", official_name: Some("Slovak Republic"), common_name: None },
    Country { alpha2: "SI", alpha3: "SVN", name: "Slovenia", official_name: Some("Republic of Slovenia"), common_name: None },
    Country { alpha2: "SE", alpha3: "SWE", name: "Sweden", official_name: Some("Kingdom of Sweden"), common_name: None },
    Country { alpha2: "SZ", alpha3: "SWZ", name: "Eswatini", official_name: Some("Kingdom of Eswatini"), common_name: None },
    Country { alpha2: "SX", alpha3: "SXM", name: "Sint Maarten (Dutch part)", official_name: Some("Sint Maarten (Dutch part)"), common_name: None },
    Country { alpha2: "SC", alpha3: "SYC", name: "Seychelles", official_name: Some("Republic of Seychelles"), common_name: None },
    Country { alpha2: "SY", alpha3: "SYR", name: "Syrian Arab Republic", official_name: None, common_name: Some("Syria") },
    Country { alpha2: "TC", alpha3: "TCA", name: "Turks and Caicos Islands", official_name: None, common_name: None },
    Country { alpha2: "TD", alpha3: "TCD", name: "Chad", official_name: Some("Republic of Chad"), common_name: None },
    Country { alpha2: "TG", alpha3: "TGO", name: "Togo", official_name: Some("Togolese Republic"), common_name: None },
    Country { alpha2: "TH", alpha3: "THA", name: "Thailand", official_name: Some("Kingdom of Thailand"), common_name: None },
    Country { alpha2: "TJ", alpha3: "TJK", name: "Tajikistan", official_name: Some("Republic of Tajikistan"), common_name: None },
    Country { alpha2: "TK", alpha3: "TKL", name: "Tokelau", official_name: None, common_name: None },
    Country { alpha2: "TM", alpha3: "TKM", name: "Turkmenistan", official_name: None, common_name: None },
    Country { alpha2: "TL", alpha3: "TLS", name: "Timor-Leste", official_name: Some("Democratic Republic of Timor-Leste"), common_name: None },
    Country { alpha2: "TO", alpha3: "TON", name: "Tonga", official_name: Some("Kingdom of Tonga"), common_name: None },
    Country { alpha2: "TT", alpha3: "TTO", name: "Trinidad and Tobago", official_name: Some("Republic of Trinidad and Tobago"), common_name: None },
    Country { alpha2: "TN", alpha3: "TUN", name: "Tunisia", official_name: Some("Republic of Tunisia"), common_name: None },
    Country { alpha2: "TR", alpha3: "TUR", name: "Türkiye", official_name: Some("Republic of Türkiye"), common_name: None },
    Country { alpha2: "TV", alpha3: "TUV", name: "Tuvalu", official_name: None, common_name: None },
    Country { alpha2: "TW", alpha3: "TWN", name: "Taiwan, Province of China", official_name: Some("Taiwan, Province of China"), common_name: Some("Taiwan") },
    Country { alpha2: "TZ", alpha3: "TZA", name: "Tanzania, United Republic of", official_name: Some("United Republic of Tanzania"), common_name: Some("Tanzania") },
    Country { alpha2: "UG", alpha3: "UGA", name: "Uganda", official_name: Some("Republic of Uganda"), common_name: None },
    Country { alpha2: "UA", alpha3: "UKR", name: "Ukraine", official_name: None, common_name: None },
    Country { alpha2: "UM", alpha3: "UMI", name: "United States Minor Outlying Islands", official_name: None, common_name: None },
    Country { alpha2: "UY", alpha3: "URY", name: "Uruguay", official_name: Some("Eastern Republic of Uruguay"), common_name: None },
    Country { alpha2: "US", alpha3: "USA", name: "United States", official_name: Some("United States of America"), common_name: None },
    Country { alpha2: "UZ", alpha3: "UZB", name: "Uzbekistan", official_name: Some("Republic of Uzbekistan"), common_name: None },
    Country { alpha2: "VA", alpha3: "VAT", name: "Holy See (Vatican City State)", official_name: None, common_name: None },
    Country { alpha2: "VC", alpha3: "VCT", name: "Saint Vincent and the Grenadines", official_name: None, common_name: None },
    Country { alpha2: "VE", alpha3: "VEN", name: "Venezuela, Bolivarian Republic of", official_name: Some("Bolivarian Republic of Venezuela"), common_name: Some("Venezuela") },
    Country { alpha2: "VG", alpha3: "VGB", name: "Virgin Islands, British", official_name: Some("British Virgin Islands"), common_name: None },
    Country { alpha2: "VI", alpha3: "VIR", name: "Virgin Islands, U.S.", official_name: Some("Virgin Islands of the United States"), common_name: None },
    Country { alpha2: "VN", alpha3: "VNM", name: "Viet Nam", official_name: Some("Socialist Republic of Viet Nam"), common_name: Some("Vietnam") },
    Country { alpha2: "VU", alpha3: "VUT", name: "Vanuatu", official_name: Some("Republic of Vanuatu"), common_name: None },
    Country { alpha2: "WF", alpha3: "WLF", name: "Wallis and Futuna", official_name: None, common_name: None },
    Country { alpha2: "WS", alpha3: "WSM", name: "Samoa", official_name: Some("Independent State of Samoa"), common_name: None },
    Country { alpha2: "YE", alpha3: "YEM", name: "Yemen", official_name: Some("Republic of Yemen"), common_name: None },
    Country { alpha2: "ZA", alpha3: "ZAF", name: "South Africa", official_name: Some("Republic of South Africa"), common_name: None },
    Country { alpha2: "ZM", alpha3: "ZMB", name: "Zambia", official_name: Some("Republic of Zambia"), common_name: None },
    Country { alpha2: "ZW", alpha3: "ZWE", name: "Zimbabwe", official_name: Some("Republic of Zimbabwe"), common_name: None },
];
