//! Static text for the `list` and `help` subcommands.

/// Overview of the kinds of news the tool can fetch.
pub const DATA_TYPES: &str = "\
Available types of data:
1. Trend News
   - This subcommand allows you to fetch the latest trending news articles.
   - You can filter by keyword, number of articles, date range, and display options (brief or full details).
2. Search News
   - This subcommand lets you search for news articles based on a specific keyword.
   - You can customize the number of articles, sort by relevance or publication date, and specify a date range.
3. Category News
   - This subcommand allows you to search for news articles in a specific category (e.g., technology, business, etc.).
   - You can filter the results by keyword, number of articles, date range, and sorting criteria.
4. Source News
   - This subcommand helps you fetch news articles from a specific source (e.g., BBC, CNN, etc.).
   - You can customize the number of articles, apply a date range, and sort the results.
";

/// Detailed usage of every subcommand.
pub const SUBCOMMANDS: &str = "\
Available subcommands and options:

trend    - Get trending news.
  -n, --num       Number of news articles to display (default: 5).
  -d, --date      Specify the date range (format: YYYY-MM-DD,YYYY-MM-DD).
  -b, --brief     Show only title and description.
  [keyword]       Keyword to search news articles (default: 'technology').

search   - Search news articles by keyword.
  <keyword>       Keyword to search news articles.
  -n, --num       Number of news articles to display (default: 5).
  -d, --date      Specify the date range (format: YYYY-MM-DD,YYYY-MM-DD).
  -u, --uptodate  Sort by latest date first.
  -b, --brief     Show only title and description.
  -r, --relevance Sort by most relevant.

category - Search news articles by category.
  <keyword>       Keyword to search category news articles.
  -n, --num       Number of news articles to display (default: 5).
  -d, --date      Specify the date range (format: YYYY-MM-DD,YYYY-MM-DD).
  -u, --uptodate  Sort by latest date first.
  -b, --brief     Show only title and description.
  -r, --relevance Sort by most relevant.

source   - Search news articles by source.
  <keyword>       Keyword to search source news articles.
  -n, --num       Number of news articles to display (default: 5).
  -d, --date      Specify the date range (format: YYYY-MM-DD,YYYY-MM-DD).
  -u, --uptodate  Sort by latest date first.
  -b, --brief     Show only title and description.
  -r, --relevance Sort by most relevant.
";
