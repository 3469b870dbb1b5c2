/// Sample roster: 15 candidates from six companies, tab separated with a header row.
pub const EXAMPLE_ROSTER: &str = "\
ID\tOrganization\tName\tRoom\tEmail\n\
1\tCompany A\tJohn Doe\tRoom 101\tjohn.doe@companya.com\n\
2\tCompany A\tJane Smith\tRoom 101\tjane.smith@companya.com\n\
3\tCompany A\tBob Wilson\tRoom 101\tbob.wilson@companya.com\n\
4\tCompany B\tAlice Johnson\tRoom 101\talice.j@companyb.com\n\
5\tCompany B\tCharlie Brown\tRoom 101\tcharlie.b@companyb.com\n\
6\tCompany C\tDiana Prince\tRoom 102\tdiana.p@companyc.com\n\
7\tCompany C\tEthan Hunt\tRoom 102\tethan.h@companyc.com\n\
8\tCompany C\tFiona Apple\tRoom 102\tfiona.a@companyc.com\n\
9\tCompany D\tGeorge Martin\tRoom 102\tgeorge.m@companyd.com\n\
10\tCompany D\tHannah Montana\tRoom 102\thannah.m@companyd.com\n\
11\tCompany E\tIan Malcolm\tRoom 103\tian.m@companye.com\n\
12\tCompany E\tJulia Roberts\tRoom 103\tjulia.r@companye.com\n\
13\tCompany F\tKevin Hart\tRoom 103\tkevin.h@companyf.com\n\
14\tCompany F\tLaura Croft\tRoom 103\tlaura.c@companyf.com\n\
15\tCompany F\tMichael Scott\tRoom 103\tmichael.s@companyf.com";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seating::distributor::distribute;
    use crate::seating::parser::parse_table;
    use crate::seating::stats::compute_statistics;
    use crate::seating::validator::validate;

    #[test]
    fn test_example_parses() {
        let table = parse_table(EXAMPLE_ROSTER, true).unwrap();
        assert_eq!(table.headers, vec!["ID", "Organization", "Name", "Room", "Email"]);
        assert_eq!(table.records.len(), 15);
        assert_eq!(table.records[14].get("Name"), Some("Michael Scott"));
    }

    #[test]
    fn test_example_arranges_without_adjacent_colleagues() {
        let table = parse_table(EXAMPLE_ROSTER, true).unwrap();
        let order = distribute(&table.records, "Organization", false);

        let stats = compute_statistics(&order, "Organization");
        assert_eq!(stats.organizations, 6);
        assert_eq!(stats.largest_organization, 3);

        assert_eq!(order[0].get("Name"), Some("John Doe"));
        assert_eq!(order[1].get("Name"), Some("Alice Johnson"));
        assert!(validate(&order, "Organization", 1).is_empty());
    }
}
